#[tokio::main]
async fn main() {
    ecorahi::start_server().await;
}
