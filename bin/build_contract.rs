//! Binary for building WASM contracts from odra modules.

#[allow(unused_imports)]
use dex_facade_contracts;

fn main() {
    // This binary is used by the Odra build system to compile contracts to WASM
    // The actual compilation is handled by the odra-build crate
}
