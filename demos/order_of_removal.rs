use idvec::IndexedVec;
use log::info;
use std::env;

/// Insert a few labels, remove some of them and show how the remaining
/// elements moved while their handles kept resolving to them.
///
/// Usage: `order_of_removal [keep|fast]`, verbosity through `RUST_LOG`.
fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let keep_order = match env::args().nth(1).as_ref().map(String::as_str) {
        None | Some("keep") => true,
        Some("fast") => false,
        Some(other) => {
            failure::bail!("unknown mode `{}`, expected `keep` or `fast`", other);
        }
    };
    info!("keep order: {}", keep_order);

    let mut vec = IndexedVec::with_order(keep_order);
    let labels = ["A", "B", "C", "D", "E"];
    let handles: Vec<_> = labels.iter().map(|label| vec.insert(*label)).collect();
    println!("inserted: {:?}", vec.data());

    vec.remove(handles[0])?;
    vec.remove(handles[2])?;
    println!("after removing A and C: {:?}", vec.data());

    for (handle, label) in handles.iter().zip(labels.iter()) {
        match vec.get(*handle) {
            Ok(value) => println!("{:?} -> {} at position {}", handle, value, vec.index_of(*handle)),
            Err(err) => println!("{} ({})", err, label),
        }
    }

    let recycled = vec.insert("F");
    println!("F got {:?}: {:?}", recycled, vec.data());

    Ok(())
}
