//! Reduce a five-objective sample to two aggregated objectives and print
//! the report, end to end.
//!
//! Run with: `cargo run --example reduce_objectives`

use std::time::Instant;

use objective_reduction::prelude::*;

fn main() -> Result<()> {
    // A small sample of individuals. Objectives 0/1 and 2/3 move together,
    // objective 4 is independent — a good candidate for k = 3.
    let table = ObjectiveTable::from_rows(vec![
        ("ind-0".into(), vec![1.0, 1.1, 4.0, 4.2, 0.5]),
        ("ind-1".into(), vec![2.0, 2.1, 3.0, 3.1, 1.5]),
        ("ind-2".into(), vec![3.0, 3.2, 2.0, 2.1, 2.5]),
        ("ind-3".into(), vec![4.0, 4.1, 1.0, 1.2, 0.0]),
        ("ind-4".into(), vec![0.5, 0.6, 0.5, 0.7, 3.0]),
    ])?;

    let started = Instant::now();
    let outcome = search(&table, 3, ErrorVariant::Maximum)?;
    let verification = verify(&outcome, &table)?;
    let elapsed_ms = started.elapsed().as_millis();

    print!(
        "{}",
        render(&outcome, &verification, ErrorVariant::Maximum, elapsed_ms)
    );

    Ok(())
}
