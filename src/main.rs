fn main() {
    charter_lib::run()
}
