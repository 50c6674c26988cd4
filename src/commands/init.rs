//! Report the freshly provisioned database.

use std::path::Path;

use anyhow::Result;

pub fn run(db_path: &Path) -> Result<()> {
    // Opening the store already provisioned the collections and the seed
    // credential; this command only confirms where everything lives.
    println!("Database ready at {}", db_path.display());
    println!("Seeded admin user: admin");
    Ok(())
}
