
use serde_json::json;

// Run against a live server: `cargo run` in one shell, then
// `cargo run --example quick_dev` in another.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    hc.do_get("/students").await?.print().await?;
    hc.do_get("/students/next").await?.print().await?;
    hc.do_get("/students/3").await?.print().await?;
    hc.do_get("/students/next").await?.print().await?;

    let req_create = hc.do_post(
        "/students",
        json!({
            "Name": "zzz",
            "Age": 9,
            "Score": 50
        }),
    );
    req_create.await?.print().await?;

    hc.do_delete("/students/11").await?.print().await?;
    hc.do_delete("/students/11").await?.print().await?;

    Ok(())
}
