use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = panelctl::cli::Cli::parse();
    let exit_code = panelctl::run(cli).await;
    std::process::exit(exit_code);
}
