//! Embedded CSV datasets served by the fixture
//!
//! Both tables are exact byte-for-byte payloads; clients compare them
//! verbatim, so neither carries a trailing newline.

/// People table served by the public, Basic-auth and custom-header routes
pub const SAMPLE_CSV: &str = "id,name,email,age,city
1,Alice Johnson,alice@example.com,28,New York
2,Bob Smith,bob@example.com,35,Los Angeles
3,Carol Williams,carol@example.com,42,Chicago
4,David Brown,david@example.com,31,Houston
5,Eve Davis,eve@example.com,26,Phoenix
6,Frank Miller,frank@example.com,45,Philadelphia
7,Grace Wilson,grace@example.com,33,San Antonio
8,Henry Moore,henry@example.com,29,San Diego
9,Ivy Taylor,ivy@example.com,38,Dallas
10,Jack Anderson,jack@example.com,41,San Jose";

/// Products table served by the Bearer-auth route
pub const PRODUCTS_CSV: &str = "product_id,product_name,category,price,stock
101,Laptop,Electronics,999.99,50
102,Mouse,Electronics,29.99,200
103,Keyboard,Electronics,79.99,150
104,Monitor,Electronics,299.99,75
105,Desk Chair,Furniture,199.99,30
106,Standing Desk,Furniture,499.99,20
107,Coffee Maker,Appliances,89.99,100
108,Blender,Appliances,59.99,80
109,Headphones,Electronics,149.99,120
110,Webcam,Electronics,79.99,90";

/// Content type used for every CSV response
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// One of the embedded datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    People,
    Products,
}

impl Dataset {
    /// Raw CSV body
    pub fn body(self) -> &'static str {
        match self {
            Dataset::People => SAMPLE_CSV,
            Dataset::Products => PRODUCTS_CSV,
        }
    }
}
