use super::{Build, Render};
use crate::error::Result;

/// Hardware profile. Attributes that were never set hold a
/// `"<attr> - not defined"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: String,
}

impl Computer {
    pub fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }

    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("CPU: {}", self.cpu),
            format!("RAM: {}", self.ram),
            format!("Storage: {}", self.storage),
            format!("GPU: {}", self.gpu),
        ]
    }

    pub fn display_configuration(&self) {
        for line in self.display_lines() {
            println!("{line}");
        }
    }
}

impl Render for Computer {
    fn render(&self) -> String {
        self.display_lines().join("\n")
    }
}

fn not_defined(attr: &str) -> String {
    format!("{attr} - not defined")
}

#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    cpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
    gpu: Option<String>,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.ram = Some(ram.into());
        self
    }

    pub fn storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.gpu = Some(gpu.into());
        self
    }
}

impl Build for ComputerBuilder {
    type Output = Computer;

    fn build(&self) -> Result<Computer> {
        Ok(Computer {
            cpu: self.cpu.clone().unwrap_or_else(|| not_defined("cpu")),
            ram: self.ram.clone().unwrap_or_else(|| not_defined("ram")),
            storage: self.storage.clone().unwrap_or_else(|| not_defined("storage")),
            gpu: self.gpu.clone().unwrap_or_else(|| not_defined("gpu")),
        })
    }
}
