// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for database initialization and schema enforcement.

use crate::Persistence;

#[test]
fn test_in_memory_initialization_succeeds() {
    let persistence = Persistence::new_in_memory();
    assert!(persistence.is_ok(), "{:?}", persistence.err());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = Persistence::new_in_memory().unwrap();
    let mut second = Persistence::new_in_memory().unwrap();

    first.create_admin("admin", "password").unwrap();

    // The second database must not see the first database's rows.
    assert!(second.get_admin_by_username("admin").unwrap().is_none());
}

#[test]
fn test_session_requires_existing_admin() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // No admin with id 42 exists; the FK must reject the session.
    let result = persistence.create_session("token", 42, "2099-01-01T00:00:00Z");
    assert!(result.is_err());
}
