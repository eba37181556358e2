//! Sample computers loaded on startup.

use crate::model::{NewComputer, Status};

pub fn sample_computers() -> Vec<NewComputer> {
    vec![
        NewComputer {
            name: "DEV-WORKSTATION-01".into(),
            processor: "Intel Core i7-12700K".into(),
            ram: "32GB DDR4".into(),
            storage: "1TB NVMe SSD".into(),
            ip_address: "192.168.1.101".into(),
            remote_enabled: true,
            remote_password: Some("secure123".into()),
            status: Status::Online,
        },
        NewComputer {
            name: "LAPTOP-MARKETING-03".into(),
            processor: "AMD Ryzen 7 5800H".into(),
            ram: "16GB DDR4".into(),
            storage: "512GB NVMe SSD".into(),
            ip_address: "192.168.1.205".into(),
            remote_enabled: false,
            remote_password: None,
            status: Status::Offline,
        },
        NewComputer {
            name: "SERVER-DATABASE-01".into(),
            processor: "Intel Xeon E5-2698 v4".into(),
            ram: "64GB ECC DDR4".into(),
            storage: "2TB RAID 1 SSD".into(),
            ip_address: "192.168.1.10".into(),
            remote_enabled: true,
            remote_password: Some("admin456".into()),
            status: Status::Warning,
        },
    ]
}
