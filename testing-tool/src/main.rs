use anyhow::Result;
use colored::*;
use serde_json::json;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "📦 Parcel Tracking Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url =
        std::env::var("PARCEL_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = reqwest::Client::new();

    // Paso 1: Comprobar que la API responde
    check_health(&client, &base_url).await;

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 👤 Crear cliente");
        println!("2. 📦 Crear paquete");
        println!("3. 🚚 Registrar scan");
        println!("4. 📜 Ver timeline de un paquete");
        println!("5. 🔍 Listar paquetes");
        println!("6. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-6): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        let choice = choice.trim();

        let result = match choice {
            "1" => create_customer(&client, &base_url).await,
            "2" => create_parcel(&client, &base_url).await,
            "3" => add_scan(&client, &base_url).await,
            "4" => view_timeline(&client, &base_url).await,
            "5" => list_parcels(&client, &base_url).await,
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                continue;
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ Error: {}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", format!("{}: ", label).bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Lectura opcional: una entrada vacía se convierte en None
fn prompt_optional(label: &str) -> Result<Option<String>> {
    let value = prompt(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

async fn check_health(client: &reqwest::Client, base_url: &str) {
    println!("{}", "🏥 COMPROBANDO LA API...".bright_cyan().bold());
    println!("{}", format!("URL base: {}", base_url).bright_blue());

    match client.get(format!("{}/health", base_url)).send().await {
        Ok(response) if response.status().is_success() => {
            println!("{}", "✅ API disponible".bright_green());
        }
        Ok(response) => {
            println!(
                "{}",
                format!("⚠️ La API respondió con estado {}", response.status()).bright_yellow()
            );
        }
        Err(e) => {
            println!("{}", format!("❌ API no disponible: {}", e).bright_red());
            println!(
                "{}",
                "⚠️ Puedes seguir, pero las peticiones fallarán hasta levantar el servidor"
                    .bright_yellow()
            );
        }
    }
}

async fn print_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    let body = response.text().await?;

    println!();
    println!("{}", "📥 RESPUESTA:".bright_green().bold());
    if status.is_success() {
        println!("{}", format!("Estado: {}", status).bright_green());
    } else {
        println!("{}", format!("Estado: {}", status).bright_red());
    }

    if body.is_empty() {
        println!("{}", "(sin body)".bright_blue());
        return Ok(());
    }

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", body),
    }

    Ok(())
}

async fn create_customer(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "👤 CREAR CLIENTE".bright_cyan().bold());
    println!("{}", "================".bright_cyan());

    let name = prompt("Nombre")?;
    let phone = prompt_optional("Teléfono (opcional)")?;

    let payload = json!({
        "name": name,
        "phone": phone,
    });

    println!("{}", "📤 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/customers", base_url))
        .json(&payload)
        .send()
        .await?;

    print_response(response).await
}

async fn create_parcel(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "📦 CREAR PAQUETE".bright_cyan().bold());
    println!("{}", "================".bright_cyan());

    let customer_id: i64 = prompt("ID de cliente")?.parse()?;
    let weight_kg: f64 = prompt("Peso en kg")?.parse()?;
    let addr_from = prompt("Dirección de origen")?;
    let addr_to = prompt("Dirección de destino")?;

    let payload = json!({
        "customer_id": customer_id,
        "weight_kg": weight_kg,
        "addr_from": addr_from,
        "addr_to": addr_to,
    });

    println!("{}", "📤 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/parcels", base_url))
        .json(&payload)
        .send()
        .await?;

    print_response(response).await
}

async fn add_scan(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🚚 REGISTRAR SCAN".bright_cyan().bold());
    println!("{}", "=================".bright_cyan());

    let tracking_code = prompt("Código de tracking (ej: PRC-000001)")?;
    let scan_type = prompt("Tipo (picked_up / in_transit / delivered)")?;
    let location = prompt("Ubicación")?;
    let note = prompt_optional("Nota (opcional)")?;

    let payload = json!({
        "type": scan_type,
        "location": location,
        "ts": chrono::Utc::now().to_rfc3339(),
        "note": note,
    });

    println!("{}", "📤 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/parcels/{}/scans", base_url, tracking_code))
        .json(&payload)
        .send()
        .await?;

    print_response(response).await
}

async fn view_timeline(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "📜 TIMELINE DE PAQUETE".bright_cyan().bold());
    println!("{}", "======================".bright_cyan());

    let tracking_code = prompt("Código de tracking")?;

    let response = client
        .get(format!("{}/parcels/{}/timeline", base_url, tracking_code))
        .send()
        .await?;

    print_response(response).await
}

async fn list_parcels(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔍 LISTAR PAQUETES".bright_cyan().bold());
    println!("{}", "==================".bright_cyan());

    let status = prompt_optional("Filtrar por estado (vacío = todos)")?;
    let q = prompt_optional("Buscar texto (vacío = sin filtro)")?;

    let mut request = client.get(format!("{}/parcels", base_url));
    if let Some(status) = status {
        request = request.query(&[("status", status)]);
    }
    if let Some(q) = q {
        request = request.query(&[("q", q)]);
    }

    let response = request.send().await?;

    print_response(response).await
}
