use view_ptr::view::ViewPtr;

fn main() {
    let owner = Box::new(0_u16);
    let _: ViewPtr<i32> = ViewPtr::new(&owner);
}
