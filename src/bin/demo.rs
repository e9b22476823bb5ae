use collections::HashTable;
use log::debug;

fn main() {
    env_logger::builder().init();

    let mut table = HashTable::new();
    println!("hash table: {table}");

    println!("\nsetting:");
    for (key, value) in [("I", 1), ("V", 5), ("X", 10)] {
        table.set(key, value);
        debug!(target: "demo", "{key:?} went into bucket {}", table.bucket_index(&key));
        println!("set({key:?}, {value}) -> {table}");
    }

    println!("\ngetting:");
    for key in ["I", "V", "X"] {
        match table.get(&key) {
            Ok(value) => println!("get({key:?}): {value}"),
            Err(e) => println!("get({key:?}): {e}"),
        }
    }

    println!("contains({:?}): {}", "X", table.contains(&"X"));
    println!("length: {}", table.len());

    println!("\ndeleting:");
    for key in ["I", "V", "X"] {
        match table.delete(&key) {
            Ok(value) => println!("delete({key:?}) evicted {value} -> {table}"),
            Err(e) => println!("delete({key:?}): {e}"),
        }
    }

    println!("contains({:?}): {}", "X", table.contains(&"X"));
    println!("length: {}", table.len());
}
