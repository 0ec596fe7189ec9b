//! `xmrlet methods`: list the method registry.

use xmrlet_rpc::registry::descriptors;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for d in descriptors() {
        println!("{:<32} {} -> {}", d.name, d.params_shape, d.result_shape);
    }
    println!("\n{} methods", descriptors().len());
    Ok(())
}
