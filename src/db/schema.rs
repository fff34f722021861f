diesel::table! {
    tb_customer_account (id_customer) {
        id_customer -> Integer,
        document_id -> Text,
        name -> Text,
        active -> Bool,
        total_value -> Double,
    }
}
