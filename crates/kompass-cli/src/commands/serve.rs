//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Kompass web server...");
    println!("   Listening: http://{}:{}", host, port);

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("KOMPASS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (KOMPASS_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = kompass_server::ServerConfig { allowed_origins };

    kompass_server::serve(host, port, config).await?;

    Ok(())
}
