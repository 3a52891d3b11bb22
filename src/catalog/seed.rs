//! Datos semilla del catálogo
//! 
//! Los 16 vehículos que se sirven cuando no hay `CATALOG_PATH` configurado.

use crate::models::vehicle::{Category, FuelType, VehicleRecord};

fn vehicle(
    id: &str,
    name: &str,
    category: Category,
    price: u64,
    year: i32,
    fuel_type: FuelType,
    brand: &str,
    features: &[&str],
) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        year,
        fuel_type,
        features: features.iter().map(|f| f.to_string()).collect(),
        image: format!("/images/vehicles/{}.jpg", id),
        logo: format!("/images/logos/{}.svg", brand),
    }
}

pub fn seed_vehicles() -> Vec<VehicleRecord> {
    use Category::*;

    vec![
        // Deportivos
        vehicle("gt-turismo", "GT Turismo", Sports, 165000, 2023, FuelType::Gas, "marchetti",
            &["V8 biturbo de 620 CV", "0-100 km/h en 3,1 s", "Chasis de fibra de carbono"]),
        vehicle("stradale-gts", "Stradale GTS", Sports, 245000, 2024, FuelType::Hybrid, "marchetti",
            &["V12 híbrido enchufable", "Aerodinámica activa", "Frenos carbocerámicos"]),
        vehicle("veloce-rs", "Veloce RS", Sports, 198000, 2022, FuelType::Gas, "veloce",
            &["Motor central de 5,2 L", "Escape de titanio", "Modo circuito"]),
        vehicle("apex-roadster", "Apex Roadster", Sports, 132000, 2024, FuelType::Gas, "apex",
            &["Capota eléctrica en 12 s", "Seis cilindros en línea", "Suspensión adaptativa"]),
        // SUV
        vehicle("summit-x", "Summit X", Suv, 98000, 2024, FuelType::Hybrid, "summit",
            &["Tracción total inteligente", "Siete plazas", "Suspensión neumática"]),
        vehicle("terra-sport", "Terra Sport", Suv, 87000, 2023, FuelType::Gas, "terra",
            &["Modo todoterreno", "Techo panorámico", "Remolque de 3.500 kg"]),
        vehicle("atlas-prestige", "Atlas Prestige", Suv, 112000, 2022, FuelType::Gas, "atlas",
            &["Interior de cuero semianilina", "Sonido envolvente de 22 altavoces", "Asientos con masaje"]),
        // Berlinas
        vehicle("monarch-s", "Monarch S", Sedan, 105000, 2024, FuelType::Gas, "monarch",
            &["Conducción semiautónoma", "Iluminación ambiental", "Puertas de cierre suave"]),
        vehicle("regent-lwb", "Regent LWB", Sedan, 142000, 2023, FuelType::Hybrid, "regent",
            &["Batalla larga", "Asientos traseros reclinables", "Mesas plegables"]),
        vehicle("ambassador", "Ambassador", Sedan, 89000, 2021, FuelType::Gas, "regent",
            &["V6 de 400 CV", "Cambio de nueve velocidades", "Head-up display"]),
        // Eléctricos
        vehicle("volt-luxe", "Volt Luxe", Electric, 128000, 2024, FuelType::Electric, "volt",
            &["Autonomía de 650 km", "Carga rápida de 350 kW", "Doble motor"]),
        vehicle("urban-ev", "Urban EV", Electric, 45000, 2023, FuelType::Electric, "volt",
            &["Autonomía de 420 km", "Aparcamiento automático", "Bomba de calor"]),
        vehicle("eon-grand-tourer", "Eon Grand Tourer", Electric, 156000, 2024, FuelType::Electric, "eon",
            &["Tres motores", "Arquitectura de 800 V", "Dirección en las cuatro ruedas"]),
        // Prototipos
        vehicle("aether-vision", "Aether Vision", Concept, 750000, 2026, FuelType::Hydrogen, "aether",
            &["Pila de combustible de hidrógeno", "Carrocería de aluminio reciclado", "Cabina sin botones"]),
        vehicle("nebula-one", "Nebula One", Concept, 1200000, 2025, FuelType::Electric, "nebula",
            &["1.900 CV", "Baterías de estado sólido", "Puertas de ala de gaviota"]),
        vehicle("helios-h2", "Helios H2", Concept, 540000, 2025, FuelType::Hydrogen, "helios",
            &["Repostaje en 5 minutos", "Techo solar integrado", "Emisiones cero"]),
    ]
}
