// Entry point.
fn main() {
    let greeting = "Hello, world!";
    println!("{}", greeting);
}
