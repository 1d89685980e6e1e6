use cyberkit_rs::core::export::export_subdomains;
use cyberkit_rs::core::models::SubdomainReport;

#[test]
fn writes_one_subdomain_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let report = SubdomainReport {
        domain: "example.com".to_string(),
        subdomains: vec!["api.example.com".to_string(), "www.example.com".to_string()],
    };

    let path = export_subdomains(dir.path(), &report).unwrap();

    assert_eq!(path, dir.path().join("example.com_subdomains.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "api.example.com\nwww.example.com");
}

#[test]
fn creates_missing_export_dir_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/out");
    let mut report = SubdomainReport { domain: "a.test".to_string(), subdomains: vec!["x.a.test".to_string()] };
    export_subdomains(&target, &report).unwrap();
    report.subdomains.clear();
    let path = export_subdomains(&target, &report).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}
