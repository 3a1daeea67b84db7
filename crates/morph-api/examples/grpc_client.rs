//! Call `morphrpc.Service/Analyse` and print the items
//!
//! ```bash
//! cargo run -p morph-api --example grpc_client -- "東京タワーは東京の観光名所です"
//! MORPH_GRPC_URL=http://127.0.0.1:50051 cargo run -p morph-api --example grpc_client -- books
//! ```

use anyhow::Context;

use morph_api::rpc::proto::{AnalyseRequest, ServiceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
  let url =
    std::env::var("MORPH_GRPC_URL").unwrap_or_else(|_| "http://127.0.0.1:50051".to_string());

  let mut client = ServiceClient::connect(url.clone())
    .await
    .with_context(|| format!("failed to connect to {}", url))?;

  let reply = client.analyse(AnalyseRequest { input }).await?.into_inner();

  for item in reply.items {
    println!("form: {}", item.form);
    if !item.error.is_empty() {
      println!("  error: {}", item.error);
    }
    for entry in item.entries {
      let tag_set = entry.tag_set.unwrap_or_default();
      println!("- {} {} {:?}", entry.lemma, tag_set.pos, tag_set.tags);
    }
  }

  Ok(())
}
