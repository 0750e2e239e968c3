use std::sync::Arc;

use medgraph_core::{EntityRepository, MedicalRecordService, OpError};
use medgraph_store::{GraphClient, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample data loader for the MedGraph knowledge graph
///
/// Connects to the configured graph store, seeds a small set of patients,
/// diseases and relationships, and prints the resulting disease
/// distribution. Re-running is harmless: entities that already exist are
/// reported and skipped.
///
/// # Environment Variables
/// - `NEO4J_URI`: Bolt endpoint of the graph store
/// - `NEO4J_USERNAME`: store username
/// - `NEO4J_PASSWORD`: store password
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medgraph_run=info".parse()?)
                .add_directive("medgraph_core=info".parse()?)
                .add_directive("medgraph_store=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env()?;
    let gateway = Arc::new(GraphClient::connect(&config).await?);

    let repository = EntityRepository::new(Arc::clone(&gateway));
    let records = MedicalRecordService::new(Arc::clone(&gateway));

    tracing::info!("++ Loading sample data");

    let persons = [
        ("John Doe", 45),
        ("Jane Smith", 32),
        ("Bob Johnson", 67),
        ("Alice Williams", 28),
        ("Charlie Brown", 55),
    ];
    for (name, age) in persons {
        report(repository.create_person(name, age).await)?;
    }

    let diseases = [
        (
            "Type 2 Diabetes",
            "A chronic condition affecting glucose metabolism",
        ),
        ("Hypertension", "High blood pressure condition"),
        ("COVID-19", "Respiratory illness caused by SARS-CoV-2"),
        (
            "Asthma",
            "Chronic respiratory condition causing breathing difficulties",
        ),
        (
            "Arthritis",
            "Inflammation of joints causing pain and stiffness",
        ),
    ];
    for (name, description) in diseases {
        report(repository.create_disease(name, description).await)?;
    }

    let relationships = [
        ("John Doe", "Type 2 Diabetes"),
        ("John Doe", "Hypertension"),
        ("Jane Smith", "Asthma"),
        ("Bob Johnson", "Arthritis"),
        ("Bob Johnson", "Hypertension"),
        ("Alice Williams", "COVID-19"),
        ("Charlie Brown", "Type 2 Diabetes"),
        ("Charlie Brown", "Arthritis"),
    ];
    for (person, disease) in relationships {
        report(repository.create_relationship(person, disease).await)?;
    }

    let distribution = records.disease_distribution().await?;
    tracing::info!(
        diseases = distribution.labels.len(),
        "++ Sample data loaded; active diagnoses per disease: {:?}",
        distribution
            .labels
            .iter()
            .zip(&distribution.values)
            .collect::<Vec<_>>()
    );

    Ok(())
}

/// Log a seeding outcome; an already-existing entity is expected on
/// re-runs, anything else is fatal.
fn report(result: Result<String, OpError>) -> anyhow::Result<()> {
    match result {
        Ok(message) => tracing::info!("{message}"),
        Err(OpError::AlreadyExists(message)) => tracing::info!("{message} (skipped)"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
