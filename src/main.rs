#[tokio::main]
async fn main() {
    if let Err(e) = leetdash_proxy_lib::run().await {
        eprintln!("leetdash-proxy: {}", e);
        std::process::exit(1);
    }
}
