fn main() -> anyhow::Result<()> {
    srcbundle::init();

    srcbundle::cli::run()
}
