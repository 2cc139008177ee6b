// Controller selection against a simulated driver station
use approx::assert_relative_eq;
use helm_core::hid::{DriverStation, JoystickSnapshot, Port, MAX_JOYSTICK_PORTS};
use helm_library::operator_interface::OperatorInterface;
use helm_library::selector::OiSelector;

/// Publish one name per port; empty names leave the port unplugged
fn set_names(ds: &DriverStation, names: [&str; MAX_JOYSTICK_PORTS]) {
    for (port, name) in Port::all().zip(names) {
        if name.is_empty() {
            ds.clear(port);
        } else {
            ds.publish(port, JoystickSnapshot::new(name, 8, 27));
        }
    }
}

fn port(i: usize) -> Port {
    Port::new(i).unwrap()
}

fn bindings(oi: &dyn OperatorInterface) -> Vec<Option<(Port, usize)>> {
    [
        oi.reset_gyro_button(),
        oi.calibrate_wheels_button(),
        oi.lock_wheels_button(),
        oi.lock_to_zero_button(),
    ]
    .iter()
    .map(|t| t.binding().map(|b| (b.port, b.button)))
    .collect()
}

#[test]
fn test_first_poll_always_changes() {
    let ds = DriverStation::new();
    let mut selector = OiSelector::new(ds);

    assert!(selector.did_joysticks_change());
    assert!(selector
        .last_joystick_names()
        .iter()
        .all(|n| n.as_deref() == Some("")));
}

#[test]
fn test_unchanged_names_do_not_report_change() {
    let ds = DriverStation::new();
    set_names(&ds, ["xbox", "InterLinkDX", "", "", "", ""]);
    let mut selector = OiSelector::new(ds.clone());

    assert!(selector.did_joysticks_change());
    assert!(!selector.did_joysticks_change());

    // Same names republished with different input state
    let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
    snapshot.axes[0] = 1.0;
    ds.publish(port(1), snapshot);
    assert!(!selector.did_joysticks_change());
}

#[test]
fn test_changed_name_updates_table_immediately() {
    let ds = DriverStation::new();
    let mut selector = OiSelector::new(ds.clone());
    selector.did_joysticks_change();

    // Plug in
    set_names(&ds, ["", "", "", "interlink", "", ""]);
    assert!(selector.did_joysticks_change());
    assert_eq!(selector.last_joystick_names()[3].as_deref(), Some("interlink"));

    // Rename
    set_names(&ds, ["", "", "", "InterLinkDX", "", ""]);
    assert!(selector.did_joysticks_change());
    assert_eq!(selector.last_joystick_names()[3].as_deref(), Some("InterLinkDX"));

    // Unplug
    set_names(&ds, ["", "", "", "", "", ""]);
    assert!(selector.did_joysticks_change());
    assert_eq!(selector.last_joystick_names()[3].as_deref(), Some(""));
    assert!(!selector.did_joysticks_change());
}

#[test]
fn test_selection_does_not_touch_names_table() {
    let ds = DriverStation::new();
    set_names(&ds, ["InterLinkDX", "", "", "", "", ""]);
    let mut selector = OiSelector::new(ds);

    let _ = selector.find_operator_interface();
    assert!(selector.last_joystick_names().iter().all(Option::is_none));
    assert!(selector.did_joysticks_change());
}

#[test]
fn test_case_insensitive_substring_match() {
    for name in ["InterLinkDX", "interlinkdx", "INTERLINK", "interlinked"] {
        let ds = DriverStation::new();
        set_names(&ds, ["", "", name, "", "", ""]);
        let mut selector = OiSelector::new(ds);

        let oi = selector.find_operator_interface();
        assert_eq!(oi.port(), Some(port(2)), "{name}");
        assert!(!selector.is_controller_missing());
    }
}

#[test]
fn test_lowest_port_wins() {
    let ds = DriverStation::new();
    set_names(&ds, ["other", "interlink", "interlinkdx", "none", "", ""]);
    let mut selector = OiSelector::new(ds);

    let oi = selector.find_operator_interface();
    assert_eq!(oi.name(), "InterLinkDX");
    assert_eq!(oi.port(), Some(port(1)));
}

#[test]
fn test_no_match_yields_inert_interface() {
    let ds = DriverStation::new();
    set_names(&ds, ["xbox", "ps4", "", "", "", ""]);
    let mut selector = OiSelector::new(ds);

    let oi = selector.find_operator_interface();
    assert!(selector.is_controller_missing());
    assert!(selector.no_controller_alert().is_active());
    assert!(oi.port().is_none());
    assert_relative_eq!(oi.translate_x(), 0.0);
    assert_relative_eq!(oi.translate_y(), 0.0);
    assert_relative_eq!(oi.rotate(), 0.0);
    assert!(!oi.reset_gyro_button().get());
    assert!(!oi.calibrate_wheels_button().get());
    assert!(!oi.lock_wheels_button().get());
    assert!(!oi.lock_to_zero_button().get());
}

#[test]
fn test_selection_is_repeatable() {
    let ds = DriverStation::new();
    set_names(&ds, ["", "", "", "", "InterLinkDX", ""]);
    let mut selector = OiSelector::new(ds);

    let first = selector.find_operator_interface();
    let second = selector.find_operator_interface();

    assert_eq!(first.port(), second.port());
    assert_eq!(bindings(first.as_ref()), bindings(second.as_ref()));
    assert_eq!(
        bindings(first.as_ref()),
        vec![
            Some((port(4), 14)),
            Some((port(4), 15)),
            Some((port(4), 12)),
            Some((port(4), 1)),
        ]
    );
}

#[test]
fn test_alert_follows_hardware() {
    let ds = DriverStation::new();
    let mut selector = OiSelector::new(ds.clone()).with_port_scan_logging(false);

    let _ = selector.find_operator_interface();
    assert!(selector.is_controller_missing());

    set_names(&ds, ["InterLinkDX", "", "", "", "", ""]);
    let _ = selector.find_operator_interface();
    assert!(!selector.is_controller_missing());

    set_names(&ds, ["", "", "", "", "", ""]);
    let _ = selector.find_operator_interface();
    assert!(selector.is_controller_missing());
}

#[test]
fn test_selected_interface_reads_live_hardware() {
    let ds = DriverStation::new();
    set_names(&ds, ["", "InterLinkDX", "", "", "", ""]);
    let mut selector = OiSelector::new(ds.clone());
    let oi = selector.find_operator_interface();

    let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
    snapshot.axes[0] = 0.25;
    snapshot.axes[1] = -0.5;
    snapshot.axes[3] = 0.75;
    snapshot.buttons[14] = true; // button 15
    ds.publish(port(1), snapshot);

    assert_relative_eq!(oi.translate_x(), -0.5);
    assert_relative_eq!(oi.translate_y(), -0.25);
    assert_relative_eq!(oi.rotate(), -0.75);
    assert!(oi.calibrate_wheels_button().get());
    assert!(!oi.reset_gyro_button().get());
}
