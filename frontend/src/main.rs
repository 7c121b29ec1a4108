//! Entry point for the WASM application

pub fn main() {
    report_analyzer::run();
}
