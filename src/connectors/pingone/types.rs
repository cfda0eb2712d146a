use serde::Deserialize;

use crate::import_block::ImportBlock;

pub const POPULATION: &str = "pingone_population";
pub const GROUP: &str = "pingone_group";
pub const APPLICATION: &str = "pingone_application";
pub const BRANDING_SETTINGS: &str = "pingone_branding_settings";

pub const RESOURCE_TYPES: &[&str] = &[POPULATION, GROUP, APPLICATION, BRANDING_SETTINGS];

/// PingOne data residency region; selects the API top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Region {
    #[default]
    #[value(name = "NA", alias = "na")]
    NorthAmerica,
    #[value(name = "EU", alias = "eu")]
    Europe,
    #[value(name = "CA", alias = "ca")]
    Canada,
    #[value(name = "AP", alias = "ap")]
    AsiaPacific,
}

impl Region {
    pub fn top_level_domain(self) -> &'static str {
        match self {
            Region::NorthAmerica => "com",
            Region::Europe => "eu",
            Region::Canada => "ca",
            Region::AsiaPacific => "asia",
        }
    }

    pub fn api_base_url(self) -> String {
        format!("https://api.pingone.{}/v1", self.top_level_domain())
    }
}

#[derive(Debug, Deserialize)]
pub struct Population {
    pub id: String,
    pub name: String,
}

impl Population {
    pub fn into_import_block(self, environment_id: &str) -> ImportBlock {
        ImportBlock::new(POPULATION, &self.name, format!("{}/{}", environment_id, self.id))
            .with_comment("Resource Type", POPULATION)
            .with_comment("Population Name", self.name)
            .with_comment("Population ID", self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

impl Group {
    pub fn into_import_block(self, environment_id: &str) -> ImportBlock {
        ImportBlock::new(GROUP, &self.name, format!("{}/{}", environment_id, self.id))
            .with_comment("Resource Type", GROUP)
            .with_comment("Group Name", self.name)
            .with_comment("Group ID", self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub protocol: Option<String>,
}

impl Application {
    pub fn into_import_block(self, environment_id: &str) -> ImportBlock {
        let block =
            ImportBlock::new(APPLICATION, &self.name, format!("{}/{}", environment_id, self.id))
                .with_comment("Resource Type", APPLICATION)
                .with_comment("Application Name", self.name)
                .with_comment("Application ID", self.id);

        match self.protocol {
            Some(protocol) => block.with_comment("Application Protocol", protocol),
            None => block,
        }
    }
}

pub fn branding_settings_import_block(environment_id: &str) -> ImportBlock {
    ImportBlock::new(BRANDING_SETTINGS, "branding_settings", environment_id)
        .with_comment("Resource Type", BRANDING_SETTINGS)
        .with_comment("Environment ID", environment_id)
}
