use factorial::memo::{cache_size, factorial_memoized, flush};

fn main() {
    let facs = (1..13).map(factorial_memoized).collect::<Vec<i32>>();
    println!("fac([1,...,12]) = {:?}", facs);
    // Every step of 12! was stored on the way down.
    println!("cached: {}", cache_size());

    flush();
    println!("after flush: {}", cache_size());
    // Only 1! through 4! are recomputed here.
    println!("fac(4) = {}", factorial_memoized(4));
    println!("cached: {}", cache_size());
}
