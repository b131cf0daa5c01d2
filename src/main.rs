fn main() {
    issuekit::app::cli::run();
}
