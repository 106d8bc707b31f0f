//! Integration tests for Trolley

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Write a config file pointing cart and catalog into the temp dir
    fn workspace() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let content = format!(
            "[storefront]\nname = \"Test Shop\"\n\n[cart]\nfile = \"{}\"\n\n[catalog]\nfile = \"{}\"\n",
            temp.path().join("cart.json").display(),
            temp.path().join("catalog.toml").display()
        );
        fs::write(&config_path, content).unwrap();
        (temp, config_path)
    }

    fn trolley(config: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("trolley");
        cmd.arg("--config").arg(config);
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("trolley")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("shopping cart"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("trolley")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("trolley"));
    }

    #[test]
    fn init_writes_catalog_and_lists_it() {
        let (_temp, config) = workspace();

        trolley(&config)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starter catalog written"));

        trolley(&config)
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("tee-onyx"))
            .stdout(predicate::str::contains("$24.00"));
    }

    #[test]
    fn init_refuses_second_run_without_force() {
        let (_temp, config) = workspace();

        trolley(&config).arg("init").assert().success();
        trolley(&config)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        trolley(&config)
            .args(["init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn catalog_without_init_hints_at_it() {
        let (_temp, config) = workspace();

        trolley(&config)
            .arg("catalog")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Catalog not found"))
            .stderr(predicate::str::contains("trolley init"));
    }

    #[test]
    fn show_starts_with_an_empty_cart() {
        let (_temp, config) = workspace();

        trolley(&config)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty."));
    }

    #[test]
    fn add_then_show_has_the_line() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();

        trolley(&config)
            .args(["add", "tee-onyx"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Onyx Tee (M)"));

        trolley(&config)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("tee-onyx"))
            .stdout(predicate::str::contains("$24.00"));
    }

    #[test]
    fn add_qty_multiplies_the_line_total() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();

        trolley(&config)
            .args(["add", "tote-kraft", "--qty", "3"])
            .assert()
            .success();

        trolley(&config)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("$55.50"));
    }

    #[test]
    fn qty_down_to_zero_empties_the_cart() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();
        trolley(&config).args(["add", "tee-onyx"]).assert().success();

        trolley(&config)
            .args(["qty", "tee-onyx", "-1"])
            .assert()
            .success();

        trolley(&config)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty."));
    }

    #[test]
    fn add_unknown_product_fails_with_hint() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();

        trolley(&config)
            .args(["add", "ghost"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown product: ghost"))
            .stderr(predicate::str::contains("trolley catalog"));
    }

    #[test]
    fn remove_of_absent_line_succeeds() {
        let (_temp, config) = workspace();

        trolley(&config)
            .args(["remove", "ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No cart line for ghost"));
    }

    #[test]
    fn corrupt_cart_file_reads_as_empty() {
        let (temp, config) = workspace();
        fs::write(temp.path().join("cart.json"), "definitely not json {{{").unwrap();

        trolley(&config)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty."));
    }

    #[test]
    fn show_json_carries_the_view_model() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();
        trolley(&config).args(["add", "tee-onyx"]).assert().success();

        trolley(&config)
            .args(["show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"subtotal\""))
            .stdout(predicate::str::contains("$24.00"));
    }

    #[test]
    fn show_plain_lists_ids_and_quantities() {
        let (_temp, config) = workspace();
        trolley(&config).arg("init").assert().success();
        trolley(&config)
            .args(["add", "cap-canvas", "--qty", "2"])
            .assert()
            .success();

        trolley(&config)
            .args(["show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cap-canvas 2"));
    }

    #[test]
    fn shop_refuses_without_a_terminal() {
        let (_temp, config) = workspace();

        // The terminal check comes before catalog loading, so the shop
        // refuses the same way whether or not init has run.
        trolley(&config)
            .arg("shop")
            .assert()
            .failure()
            .stderr(predicate::str::contains("interactive terminal"));

        trolley(&config).arg("init").assert().success();
        trolley(&config)
            .arg("shop")
            .assert()
            .failure()
            .stderr(predicate::str::contains("interactive terminal"));
    }

    #[test]
    fn config_path_points_at_the_file() {
        let (_temp, config) = workspace();

        trolley(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_prints_the_storefront() {
        let (_temp, config) = workspace();

        trolley(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storefront]"))
            .stdout(predicate::str::contains("Test Shop"));
    }

    #[test]
    fn config_set_round_trips() {
        let (_temp, config) = workspace();

        trolley(&config)
            .args(["config", "set", "storefront.name", "Corner Shop"])
            .assert()
            .success();

        trolley(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Corner Shop"));
    }

    #[test]
    fn config_set_rejects_unknown_keys() {
        let (_temp, config) = workspace();

        trolley(&config)
            .args(["config", "set", "storefront.color", "green"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown configuration key"))
            .stderr(predicate::str::contains("storefront.name"));
    }
}
