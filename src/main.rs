fn main() {
    stackbind::cli::run();
}
