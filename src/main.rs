#[tokio::main]
async fn main() -> Result<(), healthnexus_lib::AppError> {
    healthnexus_lib::run().await
}
