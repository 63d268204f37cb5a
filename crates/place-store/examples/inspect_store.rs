use place_store::PlaceStore;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading places...\n");

    let start = Instant::now();
    let store = PlaceStore::load_from_dir(data_dir)
        .expect("Failed to load data directory");
    let elapsed = start.elapsed();

    let (places, keywords, associations) = store.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Places: {}", places);
    println!("Keywords: {}", keywords);
    println!("Keyword associations: {}", associations);

    for keyword in store.all_keywords() {
        println!(
            "  {} -> {} places",
            keyword.label,
            store.places_for_keyword(keyword.id).len()
        );
    }
}
