use factorial::checked;
use factorial::table::factorial_lookup;

fn main() -> factorial::Result<()> {
    for n in [0, 1, 5, 12, 13].iter().copied() {
        match checked::factorial_recursive(n) {
            Ok(v) => println!("recursive({}) = {}", n, v),
            Err(e) => println!("recursive({}): {}", n, e),
        }
        match checked::factorial_iterative(n) {
            Ok(v) => println!("iterative({}) = {}", n, v),
            Err(e) => println!("iterative({}): {}", n, e),
        }
        println!("lookup({}) = {:?}", n, factorial_lookup(n));
    }

    // Propagates like any other error.
    let twelve = checked::factorial_iterative(12)?;
    println!("12! / 11! = {}", twelve / checked::factorial_iterative(11)?);
    Ok(())
}
