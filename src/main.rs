use anyhow::Result;
use std::env;

use parking_registry::{ParkingRegistry, Tariff, VehicleCategory};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Optional: load a tariff file instead of the built-in rates
    let registry = if args.len() > 1 {
        let tariff = Tariff::from_file(&args[1])?;
        println!("💰 Loaded tariff from {}", args[1]);
        ParkingRegistry::with_tariff(tariff)
    } else {
        ParkingRegistry::new()
    };

    run_demo(registry)
}

fn run_demo(mut registry: ParkingRegistry) -> Result<()> {
    println!("🅿️  Parking Facility Registry - demo");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Register owners
    println!("\n👤 Registering owners...");
    for (license, name) in [("111", "Ana"), ("222", "Luis"), ("333", "Marta")] {
        let ok = registry.register_owner(license, name);
        println!("  {} owner {} ({})", tick(ok), license, name);
    }
    // Duplicate key is rejected, nothing changes
    let dup = registry.register_owner("111", "Impostor");
    println!("  {} duplicate owner 111 rejected", tick(!dup));

    // 2. Register vehicles
    println!("\n🚗 Registering vehicles...");
    let fleet = [
        ("ABC123", 2020, "red", "111", VehicleCategory::Compact),
        ("SUV001", 2022, "black", "222", VehicleCategory::Suv),
        ("TRK777", 2018, "white", "333", VehicleCategory::Truck),
    ];
    for (plate, year, color, owner, category) in fleet {
        let ok = registry.register_vehicle(plate, year, color, owner, category);
        println!("  {} {} ({} {}, owner {})", tick(ok), plate, color, category, owner);
    }

    // 3. Register services
    println!("\n🕒 Registering services...");
    for (plate, entry, exit) in [("ABC123", 8, 12), ("SUV001", 9, 14), ("TRK777", 7, 10)] {
        match registry.register_service(plate, entry, exit) {
            Ok(cost) => println!("  ✓ {} {}h → {}h, cost ${:.2}", plate, entry, exit, cost),
            Err(err) => println!("  ✗ {} rejected: {}", plate, err),
        }
    }
    // An invalid one, reported but not recorded
    if let Err(err) = registry.register_service("ABC123", 0, 12) {
        println!("  ✗ ABC123 rejected: {}", err);
    }

    // 4. Statistics
    println!("\n📊 Statistics");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Owners:         {}", registry.owners().len());
    println!("  Vehicles:       {}", registry.vehicles().len());
    println!("  Services:       {}", registry.services().len());
    println!("  Total revenue:  ${:.2}", registry.total_revenue());
    println!("  VIP owners:     {}", registry.count_vip());
    match registry.top_hours_owner() {
        Some(owner) => println!(
            "  Top hours:      {} with {}h",
            owner.name, owner.accumulated_hours
        ),
        None => println!("  Top hours:      (no owners)"),
    }

    Ok(())
}

fn tick(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}
