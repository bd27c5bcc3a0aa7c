use canopy::{
    Bsh, Bvh, BuildConfig, Geometry, IntersectionMethod, Ray, RayHits,
    Triangle,
};
use glam::{vec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec3(rng: &mut impl Rng, range: f32) -> Vec3 {
    vec3(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

fn random_triangles(rng: &mut impl Rng, n: usize) -> Vec<Triangle> {
    (0..n)
        .map(|_| {
            let p0 = random_vec3(rng, 10.0);

            Triangle::new(
                p0,
                p0 + random_vec3(rng, 2.0),
                p0 + random_vec3(rng, 2.0),
            )
        })
        .collect()
}

fn random_ray(rng: &mut impl Rng) -> Ray {
    let origin = random_vec3(rng, 15.0);
    let target = random_vec3(rng, 5.0);

    Ray::new(origin, (target - origin).normalize())
}

fn brute_force(triangles: &[Triangle], ray: &Ray) -> Vec<u32> {
    triangles
        .iter()
        .enumerate()
        .filter(|(_, triangle)| {
            ray.intersect_triangle_default(triangle).is_some()
        })
        .map(|(id, _)| id as u32)
        .collect()
}

fn sorted_ids(hits: &RayHits) -> Vec<u32> {
    let mut ids: Vec<_> =
        hits.iter().map(|hit| hit.triangle_id.get()).collect();

    ids.sort();
    ids
}

#[test]
fn bvh_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xcafe);
    let mut total_hits = 0;

    for n in [1, 2, 3, 17, 250] {
        let triangles = random_triangles(&mut rng, n);
        let bvh = Bvh::build(triangles.clone()).unwrap();

        bvh.validate().unwrap();

        for _ in 0..200 {
            let ray = random_ray(&mut rng);
            let mut hits = RayHits::default();

            bvh.intersections(&ray, ray.origin(), &mut hits);

            let expected = brute_force(&triangles, &ray);

            total_hits += expected.len();
            assert_eq!(expected, sorted_ids(&hits));
        }
    }

    // Make sure the test actually exercises something
    assert!(total_hits > 0);
}

#[test]
fn bvh_matches_brute_force_with_depth_cap() {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    let triangles = random_triangles(&mut rng, 300);

    for max_depth in [0, 2, 5] {
        let config = BuildConfig { max_depth };
        let bvh = Bvh::build_with_config(triangles.clone(), &config).unwrap();

        assert!(bvh.depth() <= max_depth);
        bvh.validate().unwrap();

        for _ in 0..100 {
            let ray = random_ray(&mut rng);
            let mut hits = RayHits::default();

            bvh.intersections(&ray, ray.origin(), &mut hits);

            assert_eq!(brute_force(&triangles, &ray), sorted_ids(&hits));
        }
    }
}

#[test]
fn bsh_finds_subset_of_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xf00d);
    let triangles = random_triangles(&mut rng, 250);
    let bsh = Bsh::build(triangles.clone()).unwrap();

    bsh.validate().unwrap();

    for _ in 0..200 {
        let ray = random_ray(&mut rng);
        let mut hits = RayHits::default();

        bsh.intersections(&ray, ray.origin(), &mut hits);

        let expected = brute_force(&triangles, &ray);

        for id in sorted_ids(&hits) {
            assert!(expected.contains(&id));
        }
    }
}

#[test]
fn geometry_methods_agree() {
    let mut rng = StdRng::seed_from_u64(0xd00d);
    let mut geometry = Geometry::default();

    for _ in 0..4 {
        geometry
            .add_object(random_triangles(&mut rng, 50))
            .unwrap();
    }

    assert_eq!(200, geometry.triangle_count());

    for _ in 0..200 {
        let ray = random_ray(&mut rng);
        let camera_pos = ray.origin();

        let naive =
            geometry.hits(&ray, camera_pos, IntersectionMethod::Naive);

        let bvh = geometry.hits(&ray, camera_pos, IntersectionMethod::Bvh);

        assert_eq!(sorted_ids(&naive), sorted_ids(&bvh));

        if let Some(closest) = naive.closest() {
            let triangle = geometry.triangle(closest.triangle_id).unwrap();

            assert!(ray.intersect_triangle_default(triangle).is_some());
        }
    }
}
