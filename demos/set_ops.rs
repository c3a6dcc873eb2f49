//! Demonstrates set operations with `IntSet`
#![allow(clippy::many_single_char_names)]

use dense_intset::IntSet;

fn main() {
    println!("=== IntSet Set Operations ===\n");

    // Set A: {1, 2, 3, 5, 8}
    let a: IntSet = [1, 2, 3, 5, 8].into_iter().collect();

    // Set B: {2, 3, 5, 7, 11, 300}
    let b: IntSet = [2, 3, 5, 7, 11, 300].into_iter().collect();

    println!("Set A: {a}");
    println!("Set B: {b}");
    println!();

    // Union (A ∪ B)
    println!("Union (A ∪ B): {}", a.union(&b));
    println!("Expected: [1 2 3 5 7 8 11 300]\n");

    // Intersection (A ∩ B)
    println!("Intersection (A ∩ B): {}", a.intersection(&b));
    println!("Expected: [2 3 5]\n");

    // Difference (A - B)
    println!("Difference (A - B): {}", a.difference(&b));
    println!("Expected: [1 8]\n");

    // Symmetric Difference (A △ B)
    println!("Symmetric Difference (A △ B): {}", a.symmetric_difference(&b));
    println!("Expected: [1 7 8 11 300]\n");

    // Set comparisons
    println!("=== Set Comparisons ===\n");

    let subset: IntSet = [2, 3].into_iter().collect();
    println!("Subset: {subset}");
    println!("Is subset of A? {}", subset.is_subset(&a));
    println!("Is subset of B? {}", subset.is_subset(&b));

    let far: IntSet = [4, 6, 9].into_iter().collect();
    println!("Far: {far}");
    println!("Is disjoint from A? {}", far.is_disjoint(&a));
    println!("Is disjoint from B? {}\n", far.is_disjoint(&b));

    // In-place operations
    println!("=== In-place Operations ===\n");

    let mut c = a.clone();
    c.union_with(&b);
    println!("A.union_with(B): {c} (words: {})", c.word_len());

    let mut c = b.clone();
    c.intersection_with(&a);
    println!("B.intersection_with(A): {c} (words: {})", c.word_len());

    let mut c = b.clone();
    c.difference_with(&a);
    println!("B.difference_with(A): {c} (words: {})", c.word_len());

    let mut c = a.clone();
    c.symmetric_difference_with(&b);
    println!("A.symmetric_difference_with(B): {c} (words: {})\n", c.word_len());

    // Operators
    println!("=== Operators ===\n");
    println!("A & B = {}", &a & &b);
    println!("A | B = {}", &a | &b);
    println!("A ^ B = {}", &a ^ &b);
    println!("A - B = {}", &a - &b);

    let mut c = a.clone();
    c |= &b;
    c -= &subset;
    println!("(A | B) - Subset = {c}");
}
