use evatr::client::EvatrClient;
use evatr::core::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EvatrClient::new()?;

    // Simple check (network required)
    println!("=== Simple Check ===\n");

    let simple = CheckRequestBuilder::new("DE115235681", "CZ00177041").build()?;
    match client.check(&simple).await {
        Ok(r) => println!(
            "  {} => code {} ({}), checked at {} {}",
            r.validated_vat_number,
            r.error_code,
            r.error_description.as_deref().unwrap_or("—"),
            r.date,
            r.time
        ),
        Err(e) => println!("  {} => ERROR: {e}", simple.validate_vat_number),
    }

    // Qualified check
    println!("\n=== Qualified Check ===\n");

    let qualified = CheckRequestBuilder::new("DE115235681", "CZ00177041")
        .company_name("ŠKODA AUTO a.s.")
        .city("Mlada Boleslav")
        .zip("293 01")
        .street("tř. Václava Klementa 869")
        .build()?;

    match client.check(&qualified).await {
        Ok(r) => {
            println!("  valid={}", r.valid);
            if let Some(q) = &r.qualified {
                let rows = [
                    ("name", &q.result_name_description),
                    ("city", &q.result_city_description),
                    ("zip", &q.result_zip_description),
                    ("street", &q.result_street_description),
                ];
                for (label, description) in rows {
                    println!("    {label:<7} {}", description.as_deref().unwrap_or("—"));
                }
            }
        }
        Err(e) => println!("  ERROR: {e}"),
    }

    // Validation happens before anything is sent
    println!("\n=== Invalid Request ===\n");

    match CheckRequestBuilder::new("DE115235681", "").build() {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {e}"),
    }

    Ok(())
}
