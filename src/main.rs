fn main() -> Result<(), Box<dyn std::error::Error>> {
    trackbridge::runtime::run()
}
