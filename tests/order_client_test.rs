use order_records::clients::{CustomerClient, MockCustomerLookup, OrderClient, RecordClient};
use order_records::customer::CustomerError;
use order_records::lifecycle::{DataConfig, OrderSystem};
use order_records::model::{Address, Customer, CustomerId, FulfillmentStatus, OrderId};
use order_records::order::OrderError;
use rust_decimal_macros::dec;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const CUSTOMERS: &str = "\
1,leonard.rogahn@hagenes.org,71596 Eden Route,Connellymouth,LA,98872-9105
3,edison.mcglynn@okon.net,3 Schroeder Lane,Leuschkeshire,NV,50521
4,jo_hagenes@stark.net,41 Keebler Meadow,Mrazfort,OR,23471-7022
";

const ORDERS: &str = "\
7,book:20.00;pen:1.00,3,paid
8,Dates:90.88;Rice paper:66.35,1,processing
9,,3,pending
10,Lobster:17.18,3,complete
";

/// Writes both record files into a fresh directory.
fn data_dir(orders: &str, customers: &str) -> (TempDir, DataConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("orders.csv"), orders).expect("Failed to write orders");
    fs::write(dir.path().join("customers.csv"), customers).expect("Failed to write customers");
    let config = DataConfig::in_dir(dir.path());
    (dir, config)
}

fn customer(id: u32) -> Customer {
    Customer::new(
        CustomerId(id),
        format!("customer{id}@example.com"),
        Address {
            street: "1 Main St".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip: "98101".to_string(),
        },
    )
}

/// End-to-end: a persisted row becomes a fully resolved order.
#[test]
fn test_all_loads_rows_in_file_order() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    let orders = system.order_client.all().expect("Failed to load orders");
    let ids: Vec<OrderId> = orders.iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![OrderId(7), OrderId(8), OrderId(9), OrderId(10)]);

    let order = &orders[0];
    assert_eq!(order.products().len(), 2);
    assert_eq!(order.products()["book"], dec!(20.00));
    assert_eq!(order.products()["pen"], dec!(1.00));
    assert_eq!(order.fulfillment_status(), FulfillmentStatus::Paid);
    assert_eq!(order.total(), dec!(22.58));

    let expected = system
        .customer_client
        .find(CustomerId(3))
        .expect("Failed to read customers")
        .expect("Customer 3 not found");
    assert_eq!(**order.customer(), expected);

    // product names may contain spaces
    assert_eq!(orders[1].products()["Rice paper"], dec!(66.35));
    // an empty products field is an order with nothing on it
    assert!(orders[2].products().is_empty());
    assert_eq!(orders[2].total(), dec!(0));
}

#[test]
fn test_orders_of_one_customer_share_the_customer() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    let orders = system.order_client.all().unwrap();
    assert!(Arc::ptr_eq(orders[0].customer(), orders[2].customer()));
}

#[test]
fn test_find_returns_matching_order() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    let order = system
        .order_client
        .find(OrderId(8))
        .expect("Failed to load orders")
        .expect("Order 8 not found");
    assert_eq!(order.customer().id, CustomerId(1));
    assert_eq!(order.fulfillment_status(), FulfillmentStatus::Processing);
}

#[test]
fn test_find_missing_order_is_none_not_error() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    let result = system.order_client.find(OrderId(404)).expect("Lookup failed");
    assert!(result.is_none());
}

#[test]
fn test_find_returns_first_of_duplicate_ids() {
    let orders = "5,pen:1.00,1,paid\n5,book:20.00,3,shipped\n";
    let (_dir, config) = data_dir(orders, CUSTOMERS);
    let system = OrderSystem::new(config);

    let order = system.order_client.find(OrderId(5)).unwrap().unwrap();
    assert_eq!(order.fulfillment_status(), FulfillmentStatus::Paid);
}

#[test]
fn test_find_by_customer_returns_all_matches_in_file_order() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    let orders = system
        .order_client
        .find_by_customer(CustomerId(3))
        .expect("Failed to load orders")
        .expect("Customer 3 has orders");
    let ids: Vec<OrderId> = orders.iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![OrderId(7), OrderId(9), OrderId(10)]);
}

#[test]
fn test_find_by_customer_without_orders_is_none() {
    let (_dir, config) = data_dir(ORDERS, CUSTOMERS);
    let system = OrderSystem::new(config);

    // customer 4 exists but has no orders; customer 99 does not exist at all
    for id in [CustomerId(4), CustomerId(99)] {
        let result = system.order_client.find_by_customer(id).expect("Lookup failed");
        assert!(result.is_none(), "{id} should have no orders");
    }
}

#[test]
fn test_unknown_status_token_fails_like_construction() {
    let (_dir, config) = data_dir("7,book:20.00,3,unknown\n", CUSTOMERS);
    let system = OrderSystem::new(config);

    match system.order_client.all() {
        Err(OrderError::InvalidArgument(err)) => {
            assert_eq!(err.name, "fulfillment_status");
            assert_eq!(err.found, "unknown");
            assert_eq!(err.row, Some(1));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_non_integer_id_fails_with_invalid_argument() {
    let (_dir, config) = data_dir("seven,book:20.00,3,paid\n", CUSTOMERS);
    let system = OrderSystem::new(config);

    match system.order_client.all() {
        Err(OrderError::InvalidArgument(err)) => {
            assert_eq!(err.name, "id");
            assert_eq!(err.row, Some(1));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

/// Row fields are checked in construction order: id, products, customer,
/// status. A bad id or products field wins over an unknown customer, and the
/// customer is never looked up.
#[test]
fn test_row_fields_are_checked_before_the_customer_is_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    // no expectations: any customer lookup would panic
    let customers = MockCustomerLookup::new();
    let client = OrderClient::new(&path, customers.clone());

    fs::write(&path, "seven,book:1.00,42,paid\n").unwrap();
    match client.all() {
        Err(OrderError::InvalidArgument(err)) => {
            assert_eq!(err.name, "id");
            assert_eq!(err.row, Some(1));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }

    fs::write(&path, "7,book,42,paid\n").unwrap();
    assert!(matches!(
        client.all(),
        Err(OrderError::MalformedRecord { row: 1, .. })
    ));

    customers.verify();
}

#[test]
fn test_unknown_customer_is_reported_before_the_status() {
    let (_dir, config) = data_dir("7,book:1.00,42,unknown\n", CUSTOMERS);
    let system = OrderSystem::new(config);

    assert!(matches!(
        system.order_client.all(),
        Err(OrderError::UnknownCustomer { row: 1, .. })
    ));
}

/// Entries the legacy loader turned into blank names or zero prices are now
/// rejected with the row they came from.
#[test]
fn test_malformed_products_field_is_reported_with_row() {
    for products in ["book", "book:abc", ":1.00", "book:1.00;;pen:2.00"] {
        let orders = format!("7,pen:1.00,3,paid\n8,{products},3,paid\n");
        let (_dir, config) = data_dir(&orders, CUSTOMERS);
        let system = OrderSystem::new(config);

        match system.order_client.all() {
            Err(OrderError::MalformedRecord { row, .. }) => assert_eq!(row, 2, "{products:?}"),
            other => panic!("expected MalformedRecord for {products:?}, got {other:?}"),
        }
    }
}

/// Prices large enough to overflow the taxed subtotal never load.
#[test]
fn test_price_above_ceiling_is_malformed() {
    let orders = "7,pen:1.00,3,paid\n\
        8,a:50000000000000000000000000000;b:50000000000000000000000000000,3,paid\n";
    let (_dir, config) = data_dir(orders, CUSTOMERS);
    let system = OrderSystem::new(config);

    match system.order_client.all() {
        Err(OrderError::MalformedRecord { row, reason }) => {
            assert_eq!(row, 2);
            assert!(reason.contains("priced above"), "{reason}");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_wrong_field_count_is_malformed() {
    let (_dir, config) = data_dir("7,book:20.00,3\n", CUSTOMERS);
    let system = OrderSystem::new(config);

    assert!(matches!(
        system.order_client.all(),
        Err(OrderError::MalformedRecord { row: 1, .. })
    ));
}

#[test]
fn test_unresolvable_customer_fails_the_load() {
    let (_dir, config) = data_dir("7,book:20.00,42,paid\n", CUSTOMERS);
    let system = OrderSystem::new(config);

    match system.order_client.all() {
        Err(OrderError::UnknownCustomer { row, customer_id }) => {
            assert_eq!(row, 1);
            assert_eq!(customer_id, CustomerId(42));
        }
        other => panic!("expected UnknownCustomer, got {other:?}"),
    }
}

#[test]
fn test_missing_orders_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let system = OrderSystem::new(DataConfig::in_dir(dir.path()));

    assert!(matches!(system.order_client.all(), Err(OrderError::Io { .. })));
    assert!(matches!(
        system.order_client.find(OrderId(1)),
        Err(OrderError::Io { .. })
    ));
}

#[test]
fn test_each_call_rereads_the_file() {
    let (dir, config) = data_dir("7,book:20.00,3,paid\n", CUSTOMERS);
    let system = OrderSystem::new(config);
    assert!(system.order_client.find(OrderId(8)).unwrap().is_none());

    fs::write(
        dir.path().join("orders.csv"),
        "7,book:20.00,3,paid\n8,pen:1.00,1,pending\n",
    )
    .unwrap();
    assert!(system.order_client.find(OrderId(8)).unwrap().is_some());
}

#[test]
fn test_customer_client_reads_customers() {
    let (dir, _config) = data_dir(ORDERS, CUSTOMERS);
    let client = CustomerClient::new(dir.path().join("customers.csv"));

    let customers = client.all().expect("Failed to load customers");
    assert_eq!(customers.len(), 3);
    assert_eq!(customers[1].email, "edison.mcglynn@okon.net");
    assert_eq!(customers[1].address.state, "NV");
    assert!(client.find(CustomerId(2)).unwrap().is_none());
}

#[test]
fn test_customer_client_rejects_short_rows() {
    let (dir, _config) = data_dir(ORDERS, "1,a@example.com,1 Main St\n");
    let client = CustomerClient::new(dir.path().join("customers.csv"));

    assert!(matches!(
        client.all(),
        Err(CustomerError::MalformedRecord { row: 1, .. })
    ));
}

#[test]
fn test_customer_client_names_the_row_of_a_bad_id() {
    let customers = format!("{CUSTOMERS}five,a@example.com,1 Main St,Seattle,WA,98101\n");
    let (dir, _config) = data_dir(ORDERS, &customers);
    let client = CustomerClient::new(dir.path().join("customers.csv"));

    match client.all() {
        Err(CustomerError::InvalidArgument(err)) => {
            assert_eq!(err.name, "customer id");
            assert_eq!(err.row, Some(4));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

/// Order loading against a real orders file with a mocked customer side.
/// Each distinct customer id is resolved once per load.
#[test]
fn test_order_client_with_mocked_customers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, ORDERS).unwrap();

    let mut customers = MockCustomerLookup::new();
    customers.expect_find(CustomerId(3)).return_ok(Some(customer(3)));
    customers.expect_find(CustomerId(1)).return_ok(Some(customer(1)));

    let client = OrderClient::new(&path, customers.clone());
    let orders = client.all().expect("Failed to load orders");
    assert_eq!(orders.len(), 4);
    assert_eq!(orders[1].customer().email, "customer1@example.com");

    customers.verify();
}

#[test]
fn test_customer_lookup_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, ORDERS).unwrap();

    let mut customers = MockCustomerLookup::new();
    customers.expect_find(CustomerId(3)).return_err(CustomerError::MalformedRecord {
        row: 2,
        reason: "bad row".to_string(),
    });

    let client = OrderClient::new(&path, customers.clone());
    assert!(matches!(
        client.all(),
        Err(OrderError::Customer(CustomerError::MalformedRecord { row: 2, .. }))
    ));
    customers.verify();
}
