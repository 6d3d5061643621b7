fn main() {
    if let Err(err) = entry_block_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
