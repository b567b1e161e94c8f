use catalog_admin::schema::categories;
use diesel::prelude::*;

mod common;

#[test]
fn test_creates_and_migrates_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let mut conn = pool.get().expect("should acquire DB connection");

    let count = categories::table
        .count()
        .get_result::<i64>(&mut conn)
        .expect("categories table should exist");
    assert_eq!(count, 0);
}
