use bindscope::adapters::memory::{
    ChangeWriteScopeFactory, RecordingTracerFactory, StorageInverterFactory,
    StorageReadScopeFactory, TracedStorageScopeFactory,
};
use bindscope::utils::logger;
use bindscope::{
    AttributeStorage, BindError, ChangeDescriptor, CodeInverter as _, ExpressionEngine,
    ObjectHandle, Scope as _,
};
use clap::Parser;
use std::rc::Rc;

#[derive(Debug, Parser)]
#[command(name = "bindscope")]
#[command(about = "Demo driver for the expression-binding factory contracts")]
struct Cli {
    /// Seed attributes as name=value pairs (values parsed as JSON, falling
    /// back to plain strings)
    #[arg(long, value_delimiter = ',')]
    attr: Vec<String>,

    /// Attribute to resolve through a traced read scope
    #[arg(long, default_value = "title")]
    read: String,

    /// Value pushed back through the inverter after the read
    #[arg(long, default_value = "inverted")]
    push: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose);
    tracing::info!("Starting bindscope demo");

    let mut storage = AttributeStorage::new();
    storage.set("title", serde_json::Value::String("Untitled".to_string()));
    for pair in &cli.attr {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid attribute (expected name=value): {}", pair))?;
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        storage.set(name.to_string(), value);
    }
    let storage = storage.into_shared();
    let owner = ObjectHandle::new(1, "window");

    let tracer_factory = RecordingTracerFactory::new();
    let log = tracer_factory.log();

    let engine = ExpressionEngine::new()
        .with_read_scope_factory(StorageReadScopeFactory)
        .with_write_scope_factory(ChangeWriteScopeFactory)
        .with_traced_read_scope_factory(TracedStorageScopeFactory)
        .with_tracer_factory(tracer_factory)
        .with_inverter_factory(StorageInverterFactory);

    // Resolve the requested attribute through a traced read scope.
    let tracer = engine.tracer(&owner, &cli.read, Rc::clone(&storage))?;
    let scope = engine.traced_read_scope(&owner, Rc::clone(&storage), tracer)?;
    let old_value = scope.lookup(&cli.read).ok_or(BindError::MissingAttribute {
        name: cli.read.clone(),
    })?;
    tracing::info!("{}.{} resolved to {}", owner, cli.read, old_value);

    // Push a new value back through the inverter, as a two-way binding would.
    let new_value = serde_json::from_str(&cli.push)
        .unwrap_or_else(|_| serde_json::Value::String(cli.push.clone()));
    let mut inverter = engine.inverter(&owner, &cli.read, Rc::clone(&storage))?;
    inverter.invert(new_value.clone())?;
    tracing::info!("{}.{} inverted to {}", owner, cli.read, new_value);

    // The resulting change is visible to write-triggered expressions.
    let change = ChangeDescriptor::updated(&cli.read, old_value, new_value);
    let write_scope = engine.write_scope(&owner, Rc::clone(&storage), &change)?;
    if let Some(exposed) = write_scope.lookup("change") {
        tracing::info!("Write scope change: {}", exposed);
    }

    for access in log.borrow().iter() {
        tracing::info!("Dependency recorded: {} -> {}", access.owner, access.name);
    }

    println!("Resolved {} attribute(s), storage now:", log.borrow().len());
    for (name, value) in storage.borrow().iter() {
        println!("  {} = {}", name, value);
    }

    Ok(())
}
