use tiny_bitset::{BitSet, Error};

fn main() -> Result<(), Error> {
    let set = BitSet::from_slice(&[1, 4, 10, 12])?;
    println!("power set of {set}:");
    for (cardinality, bucket) in set.power_set()?.iter().enumerate() {
        let subsets: Vec<String> = bucket.iter().map(BitSet::to_string).collect();
        println!("{cardinality}: {}", subsets.join(" "));
    }

    match BitSet::from_slice(&[3, -2]) {
        Ok(set) => println!("unexpectedly built {set}"),
        Err(err) => println!("rejected: {err}"),
    }
    Ok(())
}
