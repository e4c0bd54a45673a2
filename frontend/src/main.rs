//! Entry point for the WASM application

pub fn main() {
    layman_law::start();
}
