#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(err) = iraforce_site::server::run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
