use seq_list::SeqList;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn found(hit: bool) -> &'static str {
    if hit {
        "Found"
    } else {
        "Not found"
    }
}

fn show(list: &SeqList<i32>) {
    println!("{}", list);
    println!("Size: {}", list.len());
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Linked List Tests");
    println!("{}", "=".repeat(60));

    let mut list = SeqList::new();

    println!("\nTest 1: Insert at head (3, 2, 1)");
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);
    show(&list);

    println!("\nTest 2: Insert at tail (4, 5)");
    list.push_back(4);
    list.push_back(5);
    show(&list);

    println!("\nTest 3: Search operations");
    println!("Search 3: {}", found(list.contains(&3)));
    println!("Search 10: {}", found(list.contains(&10)));

    println!("\nTest 4: Delete value 3");
    let deleted = list.remove_first(&3);
    println!("Deleted: {}", if deleted { "Yes" } else { "No" });
    show(&list);

    println!("\nTest 5: Delete head (1)");
    list.remove_first(&1);
    show(&list);

    println!("\nTest 6: Clear list");
    list.clear();
    println!("Is empty: {}", if list.is_empty() { "Yes" } else { "No" });
    println!("{}", list);

    info!(len = list.len(), "demo finished");
    println!("\nAll tests completed!");
}
