use view_ptr::view::ViewPtr;

struct Opaque;

fn main() {
    let opaque = Opaque;
    let _: ViewPtr<i32> = ViewPtr::new(&opaque);
}
