use mappable::{flap, map, MappableImpl};

/// `map(m, |x| x, c) == c`
pub fn identity<C, A, M>(mappable: &MappableImpl<C, A, A, C, M>, container: C) -> bool
where
    C: Clone + PartialEq,
    M: Fn(C, &mut dyn FnMut(A) -> A) -> C,
{
    map(mappable, |a| a, container.clone()) == container
}

/// `map(g, map(f, c)) == map(|x| g(f(x)), c)`
///
/// Three records are needed since each one is fixed to a single element type pair.
pub fn composition<CX, CY, CZ, X, Y, Z, M1, M2, M3>(
    first: &MappableImpl<CX, X, Y, CY, M1>,
    second: &MappableImpl<CY, Y, Z, CZ, M2>,
    fused: &MappableImpl<CX, X, Z, CZ, M3>,
    mut f: impl FnMut(X) -> Y,
    mut g: impl FnMut(Y) -> Z,
    container: CX,
) -> bool
where
    CX: Clone,
    CZ: PartialEq,
    M1: Fn(CX, &mut dyn FnMut(X) -> Y) -> CY,
    M2: Fn(CY, &mut dyn FnMut(Y) -> Z) -> CZ,
    M3: Fn(CX, &mut dyn FnMut(X) -> Z) -> CZ,
{
    let stepwise = map(second, &mut g, map(first, &mut f, container.clone()));
    let fused = map(fused, |x| g(f(x)), container);
    stepwise == fused
}

/// Whatever `shape_in` measures on the input, `shape_out` measures the same on the output.
pub fn shape_preserved<CA, A, B, CB, M, S>(
    mappable: &MappableImpl<CA, A, B, CB, M>,
    f: impl FnMut(A) -> B,
    container: CA,
    shape_in: impl Fn(&CA) -> S,
    shape_out: impl Fn(&CB) -> S,
) -> bool
where
    M: Fn(CA, &mut dyn FnMut(A) -> B) -> CB,
    S: PartialEq,
{
    let before = shape_in(&container);
    let out = map(mappable, f, container);
    before == shape_out(&out)
}

/// `flap(m, c, arg) == map(m, |f| f(arg), c)`
pub fn flap_is_derived<CA, F, B, CB, M, X>(
    mappable: &MappableImpl<CA, F, B, CB, M>,
    container: CA,
    arg: X,
) -> bool
where
    CA: Clone,
    CB: PartialEq,
    F: FnOnce(X) -> B,
    X: Clone,
    M: Fn(CA, &mut dyn FnMut(F) -> B) -> CB,
{
    let flapped = flap(mappable, container.clone(), arg.clone());
    flapped == map(mappable, |f| f(arg.clone()), container)
}
