use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = usersearch_api::Args::parse();
	usersearch_api::run(args).await
}
