//! lexmap - Binary Entry Point
//!
//! Walks the library surface end to end: build a table, insert keys out of
//! order, overwrite one, and print both traversal orders.

use std::error::Error;

use lexmap::SortedTable;

fn main() -> Result<(), Box<dyn Error>> {
    println!("===========================================");
    println!("  lexmap - sorted hash table demo");
    println!("===========================================");
    println!();

    let mut table = SortedTable::new(1024)?;
    println!("Created table with {} buckets", table.capacity());
    println!();

    // Insert in scrambled order; the sorted chain keeps key order
    for (key, value) in [
        ("powerpc", "Mac"),
        ("x86", "PC"),
        ("sparc", "Sun"),
        ("arm", "mobile"),
        ("riscv", "open"),
    ] {
        table.set(key, value)?;
    }
    println!("Inserted {} entries", table.len());

    print!("Ascending:  ");
    table.print_ascending()?;
    print!("Descending: ");
    table.print_descending()?;
    println!();

    // Overwrite keeps the entry in place, only the value changes
    table.set("arm", "everywhere")?;
    println!("After overwriting 'arm':");
    print!("Ascending:  ");
    table.print_ascending()?;
    println!();

    match table.get("sparc") {
        Some(value) => println!("get(\"sparc\") = '{}'", value),
        None => println!("get(\"sparc\") = not found"),
    }

    Ok(())
}
