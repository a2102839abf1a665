#![allow(dead_code)]

use rand::seq::SliceRandom;

pub const SAMPLE_INTS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

pub const WORDS: [&str; 7] = ["hello", "world", "this", "world", "is", "ted", "shiny buttons"];

pub fn shuffled_ints() -> Vec<i32> {
    let mut ints = SAMPLE_INTS.to_vec();
    ints.shuffle(&mut rand::rng());
    ints
}

pub fn is_even(i: &i32) -> bool {
    i % 2 == 0
}

pub fn double(i: i32) -> i32 {
    i * 2
}

pub fn shorter(a: &&str, b: &&str) -> bool {
    a.len() < b.len()
}
