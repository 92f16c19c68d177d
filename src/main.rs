fn main() {
    tristate::cli::run();
}
