//! Basic usage examples for `IntSet`

use dense_intset::{IntSet, WORD_BITS};

fn main() {
    println!("=== IntSet Basic Usage ===\n");

    // Create a new empty set
    let mut set = IntSet::new();
    println!("Created new set");
    println!("Initial capacity: {} integers\n", set.capacity());

    // Insert some members
    for i in [5, 10, 15, 100] {
        set.insert(i);
    }

    println!("Inserted: 5, 10, 15, 100");
    println!("Cardinality: {}", set.cardinality());
    println!("Capacity: {} integers ({WORD_BITS}-bit words)\n", set.capacity());

    // Check membership
    println!("Checking membership:");
    for i in [-1, 0, 5, 10, 15, 20, 100, 150] {
        println!(
            "  {}: {}",
            i,
            if set.contains(i) { "member" } else { "absent" }
        );
    }

    // Iterate over members
    println!("\nIterating over members:");
    print!("  Members: ");
    for i in &set {
        print!("{i} ");
    }
    println!("\n");

    // Walk with next_after
    println!("Walking with next_after:");
    let mut cur = set.next_after(0);
    while let Some(i) = cur {
        println!("  next member: {i}");
        cur = set.next_after(i as isize + 1);
    }
    println!();

    // Ranges
    println!("Inserting range [200, 210)");
    set.insert_range(200, 210);
    println!("Set: {set}");

    println!("Removing range [203, 207)");
    set.remove_range(203, 207);
    println!("Set: {set}\n");

    // Min and max
    println!("Min: {:?}", set.min());
    println!("Max: {:?}\n", set.max());

    // Negative insertion is rejected
    match set.try_insert(-3) {
        Ok(_) => println!("Inserted -3"),
        Err(err) => println!("try_insert(-3) failed: {err}\n"),
    }

    // Removal never shrinks the store, clone trims it
    set.insert(5000);
    set.remove(5000);
    let copy = set.clone();
    println!("Word length after removing 5000: {}", set.word_len());
    println!("Word length of a clone: {}", copy.word_len());
    println!("Equal? {}\n", set == copy);

    // Byte encoding
    let bytes = set.to_bytes();
    println!("Encoded as {} bytes:", bytes.len());
    for byte in &bytes {
        print!("{byte:08b} ");
    }
    println!();

    let decoded = IntSet::from_bytes(&bytes);
    println!("Decoded: {decoded}");
    println!("Round trip equal? {}", decoded == set);
}
