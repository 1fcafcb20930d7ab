pub mod levenshtein;
