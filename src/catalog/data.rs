use super::{Category, Project, ProjectStatus, Skill};

const fn skill(
    name: &'static str,
    level: u8,
    category: Category,
    experience: &'static str,
    project_count: u32,
) -> Skill {
    Skill {
        name,
        level,
        category,
        experience,
        project_count,
    }
}

pub static SKILLS: &[Skill] = &[
    skill("C/C++", 95, Category::Embedded, "8+ years", 15),
    skill("ARM Cortex-M", 92, Category::Embedded, "6+ years", 12),
    skill("FreeRTOS", 85, Category::Embedded, "5+ years", 8),
    skill("STM32", 88, Category::Embedded, "4+ years", 10),
    skill("ESP32", 82, Category::Embedded, "3+ years", 6),
    skill("Real-time Systems", 90, Category::Embedded, "6+ years", 14),
    skill("PCB Design", 75, Category::Embedded, "3+ years", 5),
    skill("Embedded Linux", 78, Category::Embedded, "3+ years", 4),
    skill("Rust", 88, Category::Backend, "4+ years", 8),
    skill("Python", 90, Category::Backend, "7+ years", 20),
    skill("PostgreSQL", 85, Category::Backend, "5+ years", 12),
    skill("Redis", 82, Category::Backend, "4+ years", 10),
    skill("Docker", 80, Category::Backend, "4+ years", 15),
    skill("Kubernetes", 75, Category::Backend, "2+ years", 6),
    skill("gRPC", 78, Category::Backend, "3+ years", 7),
    skill("Microservices", 83, Category::Backend, "4+ years", 9),
    skill("Git", 92, Category::ToolsDevOps, "8+ years", 25),
    skill("Linux", 88, Category::ToolsDevOps, "7+ years", 20),
    skill("CI/CD", 80, Category::ToolsDevOps, "4+ years", 12),
    skill("Monitoring", 75, Category::ToolsDevOps, "3+ years", 8),
    skill("Terraform", 70, Category::ToolsDevOps, "2+ years", 4),
    skill("AWS", 72, Category::ToolsDevOps, "3+ years", 6),
    skill("Debugging", 95, Category::ToolsDevOps, "8+ years", 30),
    skill("Performance Optimization", 87, Category::ToolsDevOps, "6+ years", 15),
    skill("MQTT", 85, Category::Communication, "4+ years", 8),
    skill("LoRaWAN", 78, Category::Communication, "3+ years", 5),
    skill("CAN Bus", 82, Category::Communication, "4+ years", 6),
    skill("SPI/I2C", 88, Category::Communication, "6+ years", 12),
    skill("UART/RS485", 90, Category::Communication, "7+ years", 15),
    skill("Ethernet", 83, Category::Communication, "5+ years", 10),
    skill("WiFi/Bluetooth", 80, Category::Communication, "4+ years", 8),
    skill("Modbus", 75, Category::Communication, "3+ years", 4),
];

/// Skills shown on the home page "Core Skills" card, by name.
pub static FEATURED_SKILLS: &[&str] = &["C/C++", "Rust", "Python", "ARM Cortex-M"];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "IoT Sensor Network",
        description: "Distributed sensor system with ARM Cortex-M4 processors and LoRaWAN connectivity. Handles real-time data collection from environmental sensors across industrial facilities.",
        long_description: "This project implements a scalable IoT infrastructure for environmental monitoring in industrial settings. The system consists of sensor nodes built around ARM Cortex-M4 microcontrollers, featuring low-power operation and robust wireless communication via LoRaWAN protocol.",
        technologies: &["C++", "ARM Cortex-M4", "LoRaWAN", "FreeRTOS", "STM32"],
        category: Category::Embedded,
        status: ProjectStatus::Production,
        duration: "8 months",
        impact: "40+ sensors deployed",
        repository: "https://github.com/w0vz/iot-sensor-network",
        image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&q=80",
    },
    Project {
        id: 2,
        title: "Real-time Data Pipeline",
        description: "High-performance backend system for processing sensor data with sub-millisecond latency using Rust and Redis.",
        long_description: "A high-throughput data processing pipeline built with Rust, designed to handle millions of sensor readings per second. Features real-time analytics, data validation, and automatic scaling based on load.",
        technologies: &["Rust", "Redis", "PostgreSQL", "Docker", "Kubernetes"],
        category: Category::Backend,
        status: ProjectStatus::Active,
        duration: "6 months",
        impact: "2M+ messages/sec",
        repository: "https://github.com/w0vz/realtime-pipeline",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&q=80",
    },
    Project {
        id: 3,
        title: "Firmware Update System",
        description: "OTA update mechanism for embedded devices with rollback capabilities and secure authentication.",
        long_description: "Secure over-the-air firmware update system supporting multiple device types. Includes differential updates, rollback mechanisms, and encrypted communication channels.",
        technologies: &["C", "FreeRTOS", "MQTT", "mbedTLS", "Python"],
        category: Category::Embedded,
        status: ProjectStatus::Completed,
        duration: "4 months",
        impact: "1000+ devices updated",
        repository: "https://github.com/w0vz/ota-updater",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&q=80",
    },
    Project {
        id: 4,
        title: "Distributed Cache System",
        description: "Custom distributed caching solution with automatic sharding and replication for high-availability applications.",
        long_description: "A distributed caching system built from scratch in Rust, featuring consistent hashing, automatic replication, and fault tolerance. Designed for high-performance applications requiring sub-millisecond response times.",
        technologies: &["Rust", "gRPC", "Raft Consensus", "Docker"],
        category: Category::Backend,
        status: ProjectStatus::Active,
        duration: "10 months",
        impact: "99.99% uptime",
        repository: "https://github.com/w0vz/distributed-cache",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=400&q=80",
    },
    Project {
        id: 5,
        title: "Motor Control System",
        description: "Precision motor control system for robotic applications with real-time feedback and adaptive algorithms.",
        long_description: "Advanced motor control system for industrial robotics, featuring PID control algorithms, encoder feedback, and safety mechanisms. Supports multiple motor types and communication protocols.",
        technologies: &["C++", "ARM Cortex-M7", "CAN Bus", "Real-time Linux"],
        category: Category::Embedded,
        status: ProjectStatus::Production,
        duration: "12 months",
        impact: "50+ robots deployed",
        repository: "https://github.com/w0vz/motor-control",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=400&q=80",
    },
    Project {
        id: 6,
        title: "API Gateway Service",
        description: "High-performance API gateway with rate limiting, authentication, and request routing for microservices.",
        long_description: "A robust API gateway built in Rust, handling authentication, rate limiting, request routing, and load balancing for microservice architectures. Features real-time monitoring and analytics.",
        technologies: &["Rust", "Actix-web", "Redis", "JWT", "Prometheus"],
        category: Category::Backend,
        status: ProjectStatus::Active,
        duration: "5 months",
        impact: "10K+ req/sec",
        repository: "https://github.com/w0vz/api-gateway",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=400&q=80",
    },
];
