fn main() {
    routegen::app::cli::run();
}
