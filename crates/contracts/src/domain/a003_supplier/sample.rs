use once_cell::sync::Lazy;

use super::aggregate::Supplier;

static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        Supplier::new(1, "Apple", "apple@gmail.com", "+63 123 4243", "https://via.placeholder.com/40?text=A", 61),
        Supplier::new(2, "Samsung", "samsung@gmail.com", "+63 133 3453", "https://via.placeholder.com/40?text=S", 15),
        Supplier::new(3, "Mugna Tech", "logitech@gmail.com", "+63 433 4451", "https://via.placeholder.com/40?text=M", 11),
        Supplier::new(4, "Logitech", "xiao.mi@gmail.com", "+63 433 4531", "https://via.placeholder.com/40?text=L", 5),
        Supplier::new(5, "Asus", "asus@gmail.com", "+63 234 6457", "https://via.placeholder.com/40?text=AS", 4),
        Supplier::new(6, "Lian Li", "microsoft@gmail.com", "+63 546 8345", "https://via.placeholder.com/40?text=LL", 2),
        Supplier::new(7, "NZXT", "hello@mugna.tech", "+63 917 1033 599", "https://via.placeholder.com/40?text=N", 1),
        Supplier::new(8, "Xiaomi", "lianli@gmail.com", "+63 123 3345", "https://via.placeholder.com/40?text=X", 1),
        Supplier::new(9, "Microsoft", "akko@gmail.com", "+63 334 5673", "https://via.placeholder.com/40?text=MS", 0),
        Supplier::new(10, "Sony", "intel@gmail.com", "+63 986 7465", "https://via.placeholder.com/40?text=SY", 0),
        Supplier::new(11, "Dell", "nvidia@gmail.com", "+63 461 4677", "https://via.placeholder.com/40?text=D", 0),
    ]
});

pub fn suppliers() -> &'static [Supplier] {
    &SUPPLIERS
}
