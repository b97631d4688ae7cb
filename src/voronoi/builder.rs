//! Construction of the Voronoi graph from a half-edge triangulation.
//!
//! # How It Works
//!
//! The build runs in two phases over an immutable triangulation:
//!
//! 1. **Node adjacency.** Every Delaunay edge links its two endpoint nodes.
//!    Endpoints are resolved to nodes by position.
//! 2. **Cells and vertices.** Each node is visited once, from the first
//!    half-edge that reaches it. The fan of triangles around the node is
//!    walked in rotational order and each triangle's circumcenter is looked
//!    up in a position index, creating a vertex the first time a position is
//!    seen. Afterwards every vertex is linked to the corners of its triangle,
//!    and every pair of edge-adjacent triangles links their vertices in both
//!    directions.
//!
//! Interior nodes get closed cells. Hull nodes get open fans: the walk stops
//! at the hull instead of wrapping around, so a hull node reached in the
//! middle of its fan only sees the triangles from there to the hull. Use
//! [`HullFan::Complete`] to rewind to the start of the fan first.
//!
//! # Example
//!
//! ```
//! use voronoi_graph::triangulation::HalfEdgeTriangulation;
//! use voronoi_graph::voronoi::voronoi_graph;
//! use voronoi_graph::Point2;
//!
//! let triangulation = HalfEdgeTriangulation::delaunay(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ])?;
//!
//! let graph = voronoi_graph(&triangulation)?;
//!
//! // One triangle means one Voronoi vertex (the circumcenter)
//! assert_eq!(graph.vertex_count(), 1);
//! for node in 0..3 {
//!     assert_eq!(graph.vertices_by_node(node), &[0]);
//!     assert_eq!(graph.neighbours(node).len(), 2);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::config::{BuildConfig, HullFan, PositionEquality};
use super::graph::{Node, Vertex, VoronoiGraph};
use super::index::PositionIndex;
use crate::error::VoronoiError;
use crate::primitives::Point2;
use crate::triangulation::Triangulation;
use num_traits::Float;
use tracing::{debug, trace};

/// Builds [`VoronoiGraph`]s from triangulations.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<F> {
    config: BuildConfig<F>,
}

impl<F: Float> Default for GraphBuilder<F> {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}

impl<F: Float> GraphBuilder<F> {
    /// Creates a builder with the given options.
    pub fn new(config: BuildConfig<F>) -> Self {
        Self { config }
    }

    /// The options this builder uses.
    pub fn config(&self) -> &BuildConfig<F> {
        &self.config
    }

    /// Builds the Voronoi dual of `triangulation`.
    ///
    /// # Errors
    ///
    /// - [`VoronoiError::InvalidTolerance`] if the configuration is invalid.
    /// - [`VoronoiError::UnresolvedEndpoint`] if an edge endpoint is not one
    ///   of the triangulation's points.
    /// - [`VoronoiError::LookupInconsistency`] if the vertex position index
    ///   loses a freshly inserted position.
    pub fn build<T>(&self, triangulation: &T) -> Result<VoronoiGraph<F>, VoronoiError>
    where
        T: Triangulation<F> + ?Sized,
    {
        self.config.validate()?;

        debug!(
            points = triangulation.points().len(),
            triangles = triangulation.triangle_count(),
            "building voronoi graph"
        );

        let mut state = BuildState::new(triangulation, self.config.equality);
        state.link_neighbours(triangulation)?;
        state.discover_cells(triangulation, self.config.hull_fan)?;
        state.link_vertices(triangulation);

        Ok(state.finish())
    }
}

/// Builds the Voronoi graph of `triangulation` with the default options.
///
/// # Errors
///
/// See [`GraphBuilder::build`].
pub fn voronoi_graph<F, T>(triangulation: &T) -> Result<VoronoiGraph<F>, VoronoiError>
where
    F: Float,
    T: Triangulation<F> + ?Sized,
{
    GraphBuilder::default().build(triangulation)
}

/// The graph under construction, owned by a single `build` call.
struct BuildState<F> {
    nodes: Vec<Node<F>>,
    vertices: Vec<Vertex<F>>,
    vertex_index: PositionIndex<F>,
    /// Vertex of each triangle, once its circumcenter has been visited.
    triangle_vertex: Vec<Option<usize>>,
}

impl<F: Float> BuildState<F> {
    fn new<T: Triangulation<F> + ?Sized>(triangulation: &T, equality: PositionEquality<F>) -> Self {
        let triangle_count = triangulation.triangle_count();
        Self {
            nodes: triangulation.points().iter().map(|&p| Node::new(p)).collect(),
            vertices: Vec::with_capacity(triangle_count),
            vertex_index: PositionIndex::with_capacity(equality, triangle_count),
            triangle_vertex: vec![None; triangle_count],
        }
    }

    fn link_neighbours<T: Triangulation<F> + ?Sized>(
        &mut self,
        triangulation: &T,
    ) -> Result<(), VoronoiError> {
        let mut origins = PositionIndex::with_capacity(PositionEquality::Exact, self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            origins.insert(node.position, i);
        }

        let resolve = |p: Point2<F>| {
            origins.get(p).ok_or_else(|| VoronoiError::UnresolvedEndpoint {
                x: p.x.to_f64().unwrap_or(f64::NAN),
                y: p.y.to_f64().unwrap_or(f64::NAN),
            })
        };

        let mut links = 0;
        for edge in triangulation.edges() {
            let p = resolve(edge.p)?;
            let q = resolve(edge.q)?;
            if p == q {
                continue;
            }
            links += usize::from(self.link_node(p, q));
            self.link_node(q, p);
        }

        debug!(links, "linked neighbouring nodes");
        Ok(())
    }

    fn link_node(&mut self, from: usize, to: usize) -> bool {
        let neighbours = &mut self.nodes[from].neighbours;
        if neighbours.contains(&to) {
            return false;
        }
        neighbours.push(to);
        true
    }

    fn discover_cells<T: Triangulation<F> + ?Sized>(
        &mut self,
        triangulation: &T,
        hull_fan: HullFan,
    ) -> Result<(), VoronoiError> {
        let triangles = triangulation.triangles();
        let mut seen = vec![false; self.nodes.len()];
        let mut circumcenters = 0;

        for h in 0..triangulation.halfedge_count() {
            let cell_node = triangles[triangulation.next_halfedge(h)];
            if seen[cell_node] {
                continue;
            }
            seen[cell_node] = true;

            let start = match hull_fan {
                HullFan::Complete => triangulation.fan_start(h),
                HullFan::AsWalked => h,
            };
            let fan = triangulation.edges_around_point(start);
            let closed = fan.last().is_some_and(|&last| {
                triangulation.halfedge(triangulation.next_halfedge(last)) == Some(start)
            });

            let mut cell = Vec::with_capacity(fan.len());
            for e in fan {
                let vertex = self.vertex_of_triangle(triangulation, triangulation.triangle_of_edge(e))?;
                let nodes = &mut self.vertices[vertex].nodes;
                if !nodes.contains(&cell_node) {
                    nodes.push(cell_node);
                }
                cell.push(vertex);
            }
            circumcenters += cell.len();

            trace!(node = cell_node, vertices = cell.len(), closed, "discovered cell");
            let node = &mut self.nodes[cell_node];
            node.cell = cell;
            node.closed = closed;
        }

        debug!(
            vertices = self.vertices.len(),
            positions = self.vertex_index.len(),
            circumcenters,
            "discovered voronoi cells"
        );
        Ok(())
    }

    fn vertex_of_triangle<T: Triangulation<F> + ?Sized>(
        &mut self,
        triangulation: &T,
        triangle: usize,
    ) -> Result<usize, VoronoiError> {
        if let Some(vertex) = self.triangle_vertex[triangle] {
            return Ok(vertex);
        }

        let center = triangulation.triangle_center(triangle);
        let vertex = match self.vertex_index.get(center) {
            Some(existing) => existing,
            None => {
                let created = self.vertices.len();
                self.vertices.push(Vertex::new(center, triangle));
                self.vertex_index.insert(center, created);
                match self.vertex_index.get(center) {
                    Some(found) if found == created => created,
                    _ => return Err(VoronoiError::LookupInconsistency { vertex: created }),
                }
            }
        };

        self.triangle_vertex[triangle] = Some(vertex);
        Ok(vertex)
    }

    fn link_vertices<T: Triangulation<F> + ?Sized>(&mut self, triangulation: &T) {
        for vertex in &mut self.vertices {
            vertex.triangle_nodes = triangulation.points_of_triangle(vertex.triangle).to_vec();
        }

        // Merged cocircular triangles all contribute to the one vertex
        let mut links = 0;
        for triangle in 0..self.triangle_vertex.len() {
            let Some(v) = self.triangle_vertex[triangle] else {
                continue;
            };
            for adjacent in triangulation.triangles_adjacent_to_triangle(triangle) {
                match self.triangle_vertex[adjacent] {
                    Some(w) if w != v => {
                        links += usize::from(self.link_vertex(v, w));
                        self.link_vertex(w, v);
                    }
                    _ => {}
                }
            }
        }

        debug!(links, "linked neighbouring vertices");
    }

    fn link_vertex(&mut self, from: usize, to: usize) -> bool {
        let neighbours = &mut self.vertices[from].neighbours;
        if neighbours.contains(&to) {
            return false;
        }
        neighbours.push(to);
        true
    }

    fn finish(self) -> VoronoiGraph<F> {
        VoronoiGraph {
            nodes: self.nodes,
            vertices: self.vertices,
        }
    }
}
